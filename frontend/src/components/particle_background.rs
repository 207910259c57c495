use std::f64::consts::PI;

use log::{debug, info};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::animation::host::{AnimationHost, BrowserHost};
use crate::animation::particles::{ParticleCount, ParticleField};
use crate::animation::scene::ParticleScene;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub count: ParticleCount,
}

/// Orange dust drifting behind the page content.
#[function_component(ParticleBackground)]
pub fn particle_background(props: &Props) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let count = props.count;
        use_effect_with_deps(
            move |_| {
                let scene = mount_scene(&canvas_ref, count);
                if scene.is_none() {
                    debug!("Canvas not available, skipping particle animation");
                }
                move || drop(scene)
            },
            (),
        );
    }

    html! {
        <canvas ref={canvas_ref} class="particle-canvas" />
    }
}

fn fit_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}

fn draw(context: &CanvasRenderingContext2d, field: &ParticleField) {
    let (width, height) = field.size();
    context.clear_rect(0.0, 0.0, width, height);
    for particle in field.particles() {
        context.set_fill_style(&JsValue::from_str(&particle.fill_style()));
        context.begin_path();
        if context
            .arc(particle.x, particle.y, particle.size, 0.0, PI * 2.0)
            .is_ok()
        {
            context.fill();
        }
    }
}

fn mount_scene(canvas_ref: &NodeRef, count: ParticleCount) -> Option<ParticleScene<BrowserHost>> {
    let canvas = canvas_ref.cast::<HtmlCanvasElement>()?;
    let context = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;
    let host = BrowserHost::new()?;

    let (width, height) = host.viewport();
    fit_canvas(&canvas, width, height);
    let particles = count.resolve(width);
    let field = ParticleField::new(particles, width, height, &mut rand::thread_rng());
    info!("Starting particle animation with {} particles", particles);

    ParticleScene::start(
        host,
        field,
        move |width, height| fit_canvas(&canvas, width, height),
        move |field| draw(&context, field),
    )
}
