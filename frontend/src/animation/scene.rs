use std::cell::RefCell;
use std::rc::Rc;

use super::frame_loop::AnimationLoop;
use super::host::{AnimationHost, ResizeListener};
use super::particles::ParticleField;

/// A running particle field: stepped and drawn once per frame, resized with
/// the viewport. Dropping the scene stops the loop and removes the listener.
pub struct ParticleScene<H: AnimationHost> {
    _resize: ResizeListener<H>,
    _frames: AnimationLoop<H>,
}

impl<H: AnimationHost> ParticleScene<H> {
    pub fn start<R, D>(host: H, field: ParticleField, mut on_resize: R, mut draw: D) -> Option<Self>
    where
        R: FnMut(f64, f64) + 'static,
        D: FnMut(&ParticleField) + 'static,
    {
        let field = Rc::new(RefCell::new(field));

        let resize = {
            let viewport_host = host.clone();
            let field = field.clone();
            ResizeListener::attach(
                &host,
                Box::new(move || {
                    let (width, height) = viewport_host.viewport();
                    on_resize(width, height);
                    field.borrow_mut().resize(width, height);
                }),
            )?
        };

        // On failure `resize` is dropped here, which unregisters it.
        let frames = AnimationLoop::start(host, move || {
            let mut field = field.borrow_mut();
            field.step();
            draw(&field);
        })?;

        Some(Self {
            _resize: resize,
            _frames: frames,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::animation::host::ManualHost;

    struct Observed {
        draws: Rc<Cell<u32>>,
        sizes: Rc<RefCell<Vec<(f64, f64)>>>,
        fitted: Rc<RefCell<Vec<(f64, f64)>>>,
    }

    fn start_scene(host: &ManualHost) -> (ParticleScene<ManualHost>, Observed) {
        let (width, height) = host.viewport();
        let field = ParticleField::new(12, width, height, &mut StdRng::seed_from_u64(3));
        let observed = Observed {
            draws: Rc::new(Cell::new(0)),
            sizes: Rc::new(RefCell::new(Vec::new())),
            fitted: Rc::new(RefCell::new(Vec::new())),
        };
        let fitted = observed.fitted.clone();
        let draws = observed.draws.clone();
        let sizes = observed.sizes.clone();
        let scene = ParticleScene::start(
            host.clone(),
            field,
            move |w, h| fitted.borrow_mut().push((w, h)),
            move |field| {
                draws.set(draws.get() + 1);
                sizes.borrow_mut().push(field.size());
            },
        )
        .unwrap();
        (scene, observed)
    }

    #[test]
    fn frames_draw_and_resize_refits() {
        let host = ManualHost::with_viewport(800.0, 600.0);
        let (_scene, observed) = start_scene(&host);
        assert_eq!(host.listener_count(), 1);

        host.fire_frame();
        host.resize(320.0, 480.0);
        host.fire_frame();

        assert_eq!(observed.draws.get(), 2);
        assert_eq!(*observed.fitted.borrow(), vec![(320.0, 480.0)]);
        assert_eq!(
            *observed.sizes.borrow(),
            vec![(800.0, 600.0), (320.0, 480.0)]
        );
    }

    #[test]
    fn dropping_scene_releases_frame_listener_and_callbacks() {
        let host = ManualHost::with_viewport(800.0, 600.0);
        let (scene, observed) = start_scene(&host);
        host.fire_frame();
        assert_eq!(host.live_callbacks(), 2);

        drop(scene);

        assert_eq!(host.pending_frame(), None);
        assert_eq!(host.cancelled_frames(), vec![2]);
        assert_eq!(host.listener_count(), 0);
        assert_eq!(host.live_callbacks(), 0);

        assert!(!host.fire_frame());
        host.resize(100.0, 100.0);
        assert_eq!(observed.draws.get(), 1);
        assert!(observed.fitted.borrow().is_empty());
    }
}
