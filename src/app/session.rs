// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/session.rs
//
// Session state: loaded image, display mapping, crop engine, previews.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, bail};
use image::DynamicImage;

use crate::app::document::{ImageCodec, OutputPaths, SourceImage, output_paths};
use crate::app::interaction::{Frame, InteractionController, InteractionState};
use crate::app::mapper::DisplayMapper;
use crate::app::message::{DragGesture, InputEvent};
use crate::app::preview::{PreviewPair, PreviewSize, ScaledImageCache, compute_preview_thumbnails};
use crate::app::view::{OverlayStyle, RenderSurface, paint_crop_view};
use crate::config::AppConfig;
use crate::constant::{DRAG_STEP_MS, DRAG_STEPS};
use crate::domain::crop::{CropGeometryEngine, EngineParams, OutputCrops, compute_output_crops};
use crate::domain::geometry::Rect;
use crate::domain::layout::MonitorLayout;

/// Everything the crop tool holds in memory for one window.
///
/// All mutation happens on the caller's thread; a failed load or save
/// leaves the session as it was.
pub struct CropSession<C: ImageCodec> {
    config: AppConfig,
    layout: MonitorLayout,
    codec: C,
    mapper: DisplayMapper,
    source: Option<SourceImage>,
    engine: Option<CropGeometryEngine>,
    controller: InteractionController,
    scaled: ScaledImageCache,
    preview_size: PreviewSize,
    previews: Option<PreviewPair>,
    style: OverlayStyle,
    /// Image-space crop held while the viewport has no mapping.
    parked: Option<Rect>,
}

impl<C: ImageCodec> CropSession<C> {
    /// Empty session for `viewport`; nothing is loaded yet.
    pub fn new(config: AppConfig, layout: MonitorLayout, codec: C, viewport: (u32, u32)) -> Self {
        let preview_size = PreviewSize::for_layout(&layout, config.preview_width);
        let style = OverlayStyle {
            handle_size: config.handle_size,
            ..OverlayStyle::default()
        };
        Self {
            controller: InteractionController::new(&config),
            mapper: DisplayMapper::new(viewport.0, viewport.1),
            config,
            layout,
            codec,
            source: None,
            engine: None,
            scaled: ScaledImageCache::default(),
            preview_size,
            previews: None,
            style,
            parked: None,
        }
    }

    // =========================================================================
    // Load / save
    // =========================================================================

    /// Decode `path` and start a fresh crop on it.
    pub fn load(&mut self, path: &Path) -> anyhow::Result<()> {
        let source = SourceImage::open(&self.codec, path)
            .inspect_err(|e| log::error!("Load failed: {e}"))
            .with_context(|| format!("Failed to load {}", path.display()))?;
        self.install(source);
        Ok(())
    }

    /// Start a fresh crop on an already decoded image.
    pub fn load_image(&mut self, image: DynamicImage) -> anyhow::Result<()> {
        let source = SourceImage::new(image, None).context("Rejected source image")?;
        self.install(source);
        Ok(())
    }

    fn install(&mut self, source: SourceImage) {
        let (width, height) = source.dimensions();
        if !self.mapper.set_image(Some((width, height))) {
            self.mapper.invalidate();
        }
        self.scaled.clear();
        self.previews = None;
        self.parked = None;

        // Empty while the viewport is 0x0; the crop is initialized once a
        // mapping exists.
        let bounds = self.mapper.mapped_image_rect();
        self.engine = Some(CropGeometryEngine::new(
            &self.layout,
            EngineParams::from(&self.config),
            bounds,
        ));
        self.controller.reset();

        log::info!(
            "Loaded {}x{} image{}",
            width,
            height,
            source
                .path()
                .map(|p| format!(" from {}", p.display()))
                .unwrap_or_default()
        );
        self.source = Some(source);
    }

    /// Image-space regions for the current crop.
    #[must_use]
    pub fn output_crops(&self) -> Option<OutputCrops> {
        let mapping = self.mapper.mapping()?;
        let engine = self.engine.as_ref()?;
        Some(compute_output_crops(&engine.rect(), mapping))
    }

    /// Split the source and write `<base>_left.<ext>` and `<base>_right.<ext>`.
    pub fn save(&self, base: &Path) -> anyhow::Result<OutputPaths> {
        let Some(source) = self.source.as_ref() else {
            bail!("No image loaded");
        };
        let Some(crops) = self.output_crops() else {
            bail!("Viewport is empty, nothing to crop");
        };
        if !crops.left.is_valid() || !crops.right.is_valid() {
            bail!("Crop region {crops:?} is empty");
        }

        let (left, right) = crops.split_image(source.image());
        let paths = output_paths(base);

        for (image, path) in [(&left, &paths.left), (&right, &paths.right)] {
            self.codec
                .encode(image, path)
                .inspect_err(|e| log::error!("Save failed: {e}"))
                .with_context(|| format!("Failed to save {}", path.display()))?;
        }

        log::info!(
            "Saved wallpapers:\n{}\n{}",
            paths.left.display(),
            paths.right.display()
        );
        Ok(paths)
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Route one input event. Returns `true` if anything changed.
    ///
    /// Pointer and key events are dropped while there is no mapping.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        if let InputEvent::ViewportResized { width, height } = event {
            return self.resize_viewport(width, height);
        }
        if self.mapper.mapping().is_none() {
            return false;
        }
        let bounds = self.mapper.mapped_image_rect();
        let Some(engine) = self.engine.as_mut() else {
            return false;
        };
        match event {
            InputEvent::Pointer(pointer) => self.controller.handle_pointer(engine, pointer, bounds),
            InputEvent::Key(key) => self.controller.key_press(engine, key, bounds),
            InputEvent::ViewportResized { .. } => false,
        }
    }

    /// Carry the crop rectangle into the new viewport's display space.
    ///
    /// When the viewport collapses to 0x0 the crop is parked in image space
    /// and restored once a mapping reappears. A crop that never had a
    /// mapping is initialized against the first one.
    pub fn resize_viewport(&mut self, width: u32, height: u32) -> bool {
        let old = self.mapper.mapping().copied();
        if !self.mapper.set_viewport(width, height) {
            return false;
        }
        let new = self.mapper.mapping().copied();

        if let Some(engine) = self.engine.as_mut() {
            match (old, new) {
                (Some(old), Some(new)) => {
                    let carried =
                        new.rect_to_display_space(&old.rect_to_image_space(&engine.rect()));
                    let rect = engine.rebase(carried, new.mapped_image_rect());
                    log::debug!("Viewport {width}x{height}: crop rebased to {rect:?}");
                }
                (Some(old), None) => {
                    self.parked = Some(old.rect_to_image_space(&engine.rect()));
                    engine.end_drag();
                    self.controller.reset();
                    log::debug!("Viewport {width}x{height}: crop parked {:?}", self.parked);
                }
                (None, Some(new)) => {
                    let rect = match self.parked.take() {
                        Some(image_rect) => engine.rebase(
                            new.rect_to_display_space(&image_rect),
                            new.mapped_image_rect(),
                        ),
                        None => engine.initialize(new.mapped_image_rect()),
                    };
                    log::debug!("Viewport {width}x{height}: crop restored to {rect:?}");
                }
                (None, None) => {}
            }
        }
        self.controller.request_redraw();
        true
    }

    /// Feed a scripted drag through the controller with synthetic timestamps.
    ///
    /// Returns the number of frames the throttle released.
    pub fn replay_drag(&mut self, gesture: &DragGesture, start: Instant) -> usize {
        let mut frames = 0;
        for (i, event) in (0u64..).zip(gesture.events(DRAG_STEPS)) {
            self.handle(InputEvent::Pointer(event));
            let now = start + Duration::from_millis(i * DRAG_STEP_MS);
            if let Some(frame) = self.poll_frame(now) {
                frames += 1;
                if frame.refresh_preview {
                    self.refresh_previews();
                }
            }
        }
        frames
    }

    // =========================================================================
    // Frames
    // =========================================================================

    /// Next frame released by the redraw throttle, if any is due at `now`.
    pub fn poll_frame(&mut self, now: Instant) -> Option<Frame> {
        if self.source.is_none() {
            return None;
        }
        self.controller.poll_frame(now)
    }

    /// Paint the crop view and, if the frame asks for it, refresh previews.
    pub fn render<S: RenderSurface + ?Sized>(&mut self, surface: &mut S, frame: Frame) -> bool {
        let (Some(source), Some(mapping)) = (self.source.as_ref(), self.mapper.mapping()) else {
            return false;
        };
        let scaled = self
            .scaled
            .get_or_rebuild(source.image(), mapping, self.mapper.generation());
        let crop = self.engine.as_ref().map(CropGeometryEngine::rect);
        paint_crop_view(surface, mapping, scaled, crop, &self.style);

        if frame.refresh_preview {
            self.refresh_previews();
        }
        true
    }

    /// Recompute preview thumbnails; keeps the previous pair if the crop
    /// cannot be previewed.
    pub fn refresh_previews(&mut self) {
        let (Some(source), Some(mapping), Some(engine)) = (
            self.source.as_ref(),
            self.mapper.mapping(),
            self.engine.as_ref(),
        ) else {
            return;
        };
        let scaled = self
            .scaled
            .get_or_rebuild(source.image(), mapping, self.mapper.generation());
        if let Some(pair) = compute_preview_thumbnails(
            &engine.rect(),
            &mapping.mapped_image_rect(),
            scaled,
            self.preview_size,
        ) {
            self.previews = Some(pair);
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Whether a source image is loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }

    /// Path of the loaded image, if it came from disk.
    #[must_use]
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_ref().and_then(SourceImage::path)
    }

    /// The monitor layout the crop is locked to.
    #[must_use]
    pub fn layout(&self) -> &MonitorLayout {
        &self.layout
    }

    /// Current display mapping state.
    #[must_use]
    pub fn mapper(&self) -> &DisplayMapper {
        &self.mapper
    }

    /// Crop rectangle in display space.
    #[must_use]
    pub fn crop_rect(&self) -> Option<Rect> {
        self.engine.as_ref().map(CropGeometryEngine::rect)
    }

    /// Gesture currently in progress.
    #[must_use]
    pub fn interaction_state(&self) -> InteractionState {
        self.controller.state()
    }

    /// Last computed preview thumbnails.
    #[must_use]
    pub fn previews(&self) -> Option<&PreviewPair> {
        self.previews.as_ref()
    }

    /// Box each preview thumbnail is fitted into.
    #[must_use]
    pub fn preview_size(&self) -> PreviewSize {
        self.preview_size
    }
}
