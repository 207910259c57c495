use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// The parts of the page an animation needs: frame requests, resize
/// notifications and the viewport size. Callbacks are wrapped by the host
/// so it decides how they are kept alive.
pub trait AnimationHost: Clone + 'static {
    type Callback: 'static;

    fn wrap(&self, f: Box<dyn FnMut()>) -> Self::Callback;
    fn request_frame(&self, callback: &Self::Callback) -> Option<i32>;
    fn cancel_frame(&self, id: i32);
    fn add_resize_listener(&self, callback: &Self::Callback) -> bool;
    fn remove_resize_listener(&self, callback: &Self::Callback);
    fn viewport(&self) -> (f64, f64);
}

#[derive(Clone)]
pub struct BrowserHost {
    window: Window,
}

impl BrowserHost {
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl AnimationHost for BrowserHost {
    type Callback = Closure<dyn FnMut()>;

    fn wrap(&self, f: Box<dyn FnMut()>) -> Self::Callback {
        Closure::wrap(f)
    }

    fn request_frame(&self, callback: &Self::Callback) -> Option<i32> {
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_frame(&self, id: i32) {
        let _ = self.window.cancel_animation_frame(id);
    }

    fn add_resize_listener(&self, callback: &Self::Callback) -> bool {
        self.window
            .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            .is_ok()
    }

    fn remove_resize_listener(&self, callback: &Self::Callback) {
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
    }

    fn viewport(&self) -> (f64, f64) {
        let width = self.window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = self.window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (width, height)
    }
}

/// A registered `resize` listener. Dropping it unregisters the callback
/// before the callback itself is freed.
pub struct ResizeListener<H: AnimationHost> {
    host: H,
    callback: H::Callback,
}

impl<H: AnimationHost> ResizeListener<H> {
    pub fn attach(host: &H, on_resize: Box<dyn FnMut()>) -> Option<Self> {
        let callback = host.wrap(on_resize);
        if !host.add_resize_listener(&callback) {
            return None;
        }
        Some(Self {
            host: host.clone(),
            callback,
        })
    }
}

impl<H: AnimationHost> Drop for ResizeListener<H> {
    fn drop(&mut self) {
        self.host.remove_resize_listener(&self.callback);
    }
}

#[cfg(test)]
pub use manual::ManualHost;
