use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(width: f64, height: f64, rng: &mut R) -> Self {
        Self {
            x: rng.gen::<f64>() * width,
            y: rng.gen::<f64>() * height,
            size: rng.gen::<f64>() * 2.0 + 0.5,
            speed_x: rng.gen::<f64>() * 0.3 - 0.15,
            speed_y: rng.gen::<f64>() * 0.3 - 0.15,
            opacity: rng.gen::<f64>() * 0.3 + 0.1,
        }
    }

    /// Moves one frame and bounces off the canvas edges.
    pub fn step(&mut self, width: f64, height: f64) {
        self.x += self.speed_x;
        self.y += self.speed_y;
        if self.x < 0.0 || self.x > width {
            self.speed_x = -self.speed_x;
        }
        if self.y < 0.0 || self.y > height {
            self.speed_y = -self.speed_y;
        }
    }

    pub fn fill_style(&self) -> String {
        format!("rgba(255, 122, 0, {})", self.opacity)
    }
}

/// How many particles a page draws.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParticleCount {
    Fixed(usize),
    /// One particle per `px_per_particle` of viewport width, capped at `max`.
    ViewportScaled { px_per_particle: f64, max: usize },
}

impl ParticleCount {
    pub fn resolve(self, viewport_width: f64) -> usize {
        match self {
            ParticleCount::Fixed(n) => n,
            ParticleCount::ViewportScaled { px_per_particle, max } => {
                let scaled = (viewport_width.max(0.0) / px_per_particle).ceil() as usize;
                scaled.min(max)
            }
        }
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(count: usize, width: f64, height: f64, rng: &mut R) -> Self {
        Self {
            particles: (0..count).map(|_| Particle::random(width, height, rng)).collect(),
            width,
            height,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.step(self.width, self.height);
        }
    }

    /// Adopts new canvas bounds, pulling stragglers back inside so they do
    /// not flip direction on every frame.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        for particle in &mut self.particles {
            particle.x = particle.x.clamp(0.0, width.max(0.0));
            particle.y = particle.y.clamp(0.0, height.max(0.0));
        }
    }
}
