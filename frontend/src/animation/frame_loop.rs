use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::host::AnimationHost;

type FrameCallback<H> = Rc<RefCell<Option<<H as AnimationHost>::Callback>>>;

/// A `requestAnimationFrame` loop that can be stopped from the outside.
/// Stopping (or dropping) cancels the queued frame and frees the callback.
pub struct AnimationLoop<H: AnimationHost> {
    host: H,
    frame_id: Rc<Cell<Option<i32>>>,
    callback: FrameCallback<H>,
}

impl<H: AnimationHost> AnimationLoop<H> {
    pub fn start<F>(host: H, mut on_frame: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let frame_id = Rc::new(Cell::new(None));
        let callback: FrameCallback<H> = Rc::new(RefCell::new(None));

        let tick = {
            let host = host.clone();
            let frame_id = frame_id.clone();
            let callback = Rc::downgrade(&callback);
            Box::new(move || {
                on_frame();
                // Gone once the loop has been stopped.
                let Some(callback) = callback.upgrade() else { return };
                let next = callback
                    .borrow()
                    .as_ref()
                    .and_then(|cb| host.request_frame(cb));
                frame_id.set(next);
            }) as Box<dyn FnMut()>
        };
        let tick = host.wrap(tick);

        let first = host.request_frame(&tick)?;
        frame_id.set(Some(first));
        *callback.borrow_mut() = Some(tick);

        Some(Self {
            host,
            frame_id,
            callback,
        })
    }

    pub fn stop(&self) {
        if let Some(id) = self.frame_id.take() {
            self.host.cancel_frame(id);
        }
        self.callback.borrow_mut().take();
    }
}

impl<H: AnimationHost> Drop for AnimationLoop<H> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::animation::host::ManualHost;

    fn counting_loop(host: &ManualHost) -> (AnimationLoop<ManualHost>, Rc<Cell<u32>>) {
        let frames = Rc::new(Cell::new(0));
        let counter = frames.clone();
        let animation = AnimationLoop::start(host.clone(), move || counter.set(counter.get() + 1))
            .unwrap();
        (animation, frames)
    }

    #[test]
    fn each_frame_requests_the_next() {
        let host = ManualHost::default();
        let (_animation, frames) = counting_loop(&host);

        assert_eq!(host.pending_frame(), Some(1));
        assert!(host.fire_frame());
        assert!(host.fire_frame());
        assert_eq!(frames.get(), 2);
        assert_eq!(host.pending_frame(), Some(3));
    }

    #[test]
    fn stop_cancels_pending_frame_and_frees_callback() {
        let host = ManualHost::default();
        let (animation, frames) = counting_loop(&host);
        host.fire_frame();

        animation.stop();

        assert_eq!(host.cancelled_frames(), vec![2]);
        assert_eq!(host.pending_frame(), None);
        assert_eq!(host.live_callbacks(), 0);
        assert!(!host.fire_frame());
        assert_eq!(frames.get(), 1);

        // Stopping twice is harmless.
        animation.stop();
        assert_eq!(host.cancelled_frames(), vec![2]);
    }

    #[test]
    fn drop_stops_the_loop() {
        let host = ManualHost::default();
        let (animation, frames) = counting_loop(&host);

        drop(animation);

        assert_eq!(host.cancelled_frames(), vec![1]);
        assert_eq!(host.pending_frame(), None);
        assert_eq!(host.live_callbacks(), 0);
        assert!(!host.fire_frame());
        assert_eq!(frames.get(), 0);
    }
}
