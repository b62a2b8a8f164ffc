use std::collections::HashMap;

use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};

/// The raster layers that get their own texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Committed,
    Preview,
}

impl LayerKind {
    fn texture_name(&self) -> &'static str {
        match self {
            Self::Committed => "canvas_committed",
            Self::Preview => "canvas_preview",
        }
    }
}

struct CachedTexture {
    handle: TextureHandle,
    generation: u64,
}

/// Keeps one GPU texture per layer and re-uploads it only when the layer's
/// generation moved on since the last upload.
#[derive(Default)]
pub struct TextureManager {
    textures: HashMap<LayerKind, CachedTexture>,
    /// Number of uploads performed, handy for spotting redundant work
    uploads: u64,
}

impl TextureManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the texture for `layer`, calling `generator` only when `generation`
    /// differs from the cached one.
    pub fn get_or_upload<F>(
        &mut self,
        layer: LayerKind,
        generation: u64,
        generator: F,
        ctx: &Context,
    ) -> TextureId
    where
        F: FnOnce() -> ColorImage,
    {
        if let Some(cached) = self.textures.get_mut(&layer) {
            if cached.generation != generation {
                cached.handle.set(generator(), TextureOptions::NEAREST);
                cached.generation = generation;
                self.uploads += 1;
            }
            return cached.handle.id();
        }

        let handle = ctx.load_texture(layer.texture_name(), generator(), TextureOptions::NEAREST);
        let id = handle.id();
        self.textures.insert(layer, CachedTexture { handle, generation });
        self.uploads += 1;
        id
    }

    pub fn cache_size(&self) -> usize {
        self.textures.len()
    }

    pub fn uploads(&self) -> u64 {
        self.uploads
    }
}
