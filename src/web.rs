//! `wasm_bindgen` bindings for browser hosts.
//!
//! The page owns rendering and its scroll observer. It forwards scroll,
//! pointer, and resize events to a [`WebShelf`], calls
//! [`WebShelf::tick`] from `requestAnimationFrame`, and reads the composed
//! transforms back as one flat `Float32Array`.

use futures::FutureExt;
use glam::Vec2;
use wasm_bindgen::prelude::*;

use crate::assets::{self, ManifestLoader};
use crate::input::ShelfEvent;
use crate::options::Options;
use crate::scene::ShelfScene;
use crate::scroll::{ScrollBounds, ScrollDriver};
use crate::util::frame_timing::FrameClock;

/// Floats written per slot by [`WebShelf::transforms`].
const STRIDE: usize = 6;

/// Scroll driver backed by the browser window.
pub struct WindowScroll {
    bounds: ScrollBounds,
    enabled: bool,
}

impl WindowScroll {
    /// Driver for a pinned section spanning `start..end` page pixels.
    pub fn new(start: f32, end: f32) -> Self {
        Self {
            bounds: ScrollBounds::new(start, end),
            enabled: true,
        }
    }
}

impl ScrollDriver for WindowScroll {
    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn bounds(&self) -> ScrollBounds {
        self.bounds
    }

    fn offset(&self) -> f32 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .map_or(self.bounds.start, |y| y as f32)
    }

    fn scroll_to(&mut self, offset: f32) {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, f64::from(offset));
        }
    }
}

/// Browser-facing shelf.
#[wasm_bindgen]
pub struct WebShelf {
    scene: ShelfScene<WindowScroll>,
    clock: FrameClock,
}

#[wasm_bindgen]
impl WebShelf {
    /// Create a shelf for a `width`x`height` canvas whose pinned section
    /// spans `scroll_start..scroll_end` page pixels. `options_toml` may be
    /// empty.
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: f32,
        height: f32,
        scroll_start: f32,
        scroll_end: f32,
        options_toml: &str,
    ) -> Result<WebShelf, JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let options = if options_toml.trim().is_empty() {
            Options::default()
        } else {
            Options::from_toml(options_toml).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        let scroll = WindowScroll::new(scroll_start, scroll_end);
        Ok(Self {
            scene: ShelfScene::new(options, scroll, Vec2::new(width, height)),
            clock: FrameClock::default(),
        })
    }

    /// Install every book of a TOML manifest, in manifest order. Returns
    /// the number of books that loaded.
    pub fn load_manifest(&mut self, manifest_toml: &str) -> Result<usize, JsValue> {
        let loader =
            ManifestLoader::from_toml(manifest_toml).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let ids = loader.ids();
        let results = assets::load_batch(&loader, &ids)
            .now_or_never()
            .ok_or_else(|| JsValue::from_str("manifest loads did not resolve"))?;
        Ok(self.scene.install_batch(results).ready)
    }

    /// Scroll observer update. Dropped while the driver is suspended.
    pub fn scroll(&mut self, progress: f32) {
        if self.scene.scroll_driver().is_enabled() {
            self.scene.handle_event(ShelfEvent::Scroll { progress });
        }
    }

    /// Scroll observer left the pinned section upward.
    pub fn leave_back(&mut self) {
        self.scene.handle_event(ShelfEvent::LeaveBack);
    }

    /// Pointer click in canvas pixels.
    pub fn click(&mut self, x: f32, y: f32) {
        self.scene.handle_event(ShelfEvent::Click { x, y });
    }

    /// Pointer move in canvas pixels.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.scene.handle_event(ShelfEvent::PointerMoved { x, y });
    }

    /// Pointer left the canvas.
    pub fn pointer_leave(&mut self) {
        self.scene.handle_event(ShelfEvent::PointerLeft);
    }

    /// Canvas resized.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.scene.handle_event(ShelfEvent::Resize { width, height });
    }

    /// Advance one frame using the internal clock. Returns the delta used.
    pub fn tick(&mut self) -> f32 {
        let dt = self.clock.tick();
        self.scene.tick(dt);
        dt
    }

    /// Smoothed frames per second.
    pub fn fps(&self) -> f32 {
        self.clock.fps()
    }

    /// Camera X, for syncing the host camera.
    pub fn camera_x(&self) -> f32 {
        self.scene.camera().eye.x
    }

    /// Whether a scroll-reversal recovery is running.
    pub fn is_recovering(&self) -> bool {
        self.scene.is_recovering()
    }

    /// Position and Euler rotation of every slot, six floats each. Empty
    /// slots are NaN.
    pub fn transforms(&self) -> js_sys::Float32Array {
        let mut flat = vec![f32::NAN; self.scene.slot_count() * STRIDE];
        for book in self.scene.books() {
            let t = book.transform();
            let at = book.index() * STRIDE;
            flat[at..at + 3].copy_from_slice(&t.position.to_array());
            flat[at + 3..at + STRIDE].copy_from_slice(&t.rotation.to_array());
        }
        js_sys::Float32Array::from(flat.as_slice())
    }
}
