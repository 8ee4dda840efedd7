//! Particle plugin - cosmetic bursts when food is eaten. Never touches game state.

use bevy::prelude::*;
use rand::prelude::*;

use crate::game::{
    FoodEatenEvent, GameSet, GameStartedEvent, PARTICLE_BURST_COUNT, PARTICLE_COLOR,
    PARTICLE_DECAY, PARTICLE_MAX_SIZE, PARTICLE_MAX_SPEED, PARTICLE_MIN_SIZE, Position,
};

/// Plugin for the particle effect tracker.
pub struct ParticlePlugin;

impl Plugin for ParticlePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ParticleSet>().add_systems(
            Update,
            (clear_particles_on_start, spawn_food_eaten_particles, update_particles)
                .chain()
                .in_set(GameSet::Effects),
        );
    }
}

/// One short-lived spark. Position and velocity are in cell units.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub life: f32,
    pub color: Color,
    pub size: f32,
}

impl Particle {
    fn advanced(&self) -> Particle {
        Particle {
            position: self.position + self.velocity,
            life: self.life - PARTICLE_DECAY,
            ..self.clone()
        }
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Active particles, owned by the frame loop rather than the simulation.
#[derive(Resource, Default, Debug)]
pub struct ParticleSet {
    particles: Vec<Particle>,
}

impl ParticleSet {
    /// Spawns a burst centred on `cell`.
    pub fn spawn_burst<R: Rng + ?Sized>(&mut self, rng: &mut R, cell: Position) {
        let center = Vec2::new(cell.x as f32 + 0.5, cell.y as f32 + 0.5);
        self.particles.extend((0..PARTICLE_BURST_COUNT).map(|_| Particle {
            position: center,
            velocity: Vec2::new(
                rng.random_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
                rng.random_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
            ),
            life: 1.0,
            color: PARTICLE_COLOR,
            size: rng.random_range(PARTICLE_MIN_SIZE..PARTICLE_MAX_SIZE),
        }));
    }

    /// Advances every particle one frame, then drops the expired ones.
    pub fn update(&mut self) {
        let next: Vec<Particle> = self.particles.iter().map(Particle::advanced).collect();
        self.particles = next.into_iter().filter(Particle::is_alive).collect();
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}

/// System to drop leftover sparks when a new game begins.
fn clear_particles_on_start(
    mut started_reader: MessageReader<GameStartedEvent>,
    mut particles: ResMut<ParticleSet>,
) {
    if started_reader.read().next().is_some() {
        particles.clear();
    }
}

/// System to spawn a burst wherever food was eaten.
fn spawn_food_eaten_particles(
    mut food_eaten_reader: MessageReader<FoodEatenEvent>,
    mut particles: ResMut<ParticleSet>,
) {
    let mut rng = rand::rng();
    for event in food_eaten_reader.read() {
        particles.spawn_burst(&mut rng, event.position);
    }
}

/// System to age particles once per rendered frame.
fn update_particles(mut particles: ResMut<ParticleSet>) {
    if !particles.is_empty() {
        particles.update();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    fn spark(life: f32) -> Particle {
        Particle {
            position: Vec2::ZERO,
            velocity: Vec2::new(0.1, -0.2),
            life,
            color: PARTICLE_COLOR,
            size: 3.0,
        }
    }

    #[test]
    fn burst_spawns_ten_centered_particles() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut set = ParticleSet::default();
        set.spawn_burst(&mut rng, Position::new(4, 6));
        assert_eq!(set.len(), PARTICLE_BURST_COUNT);
        for particle in set.iter() {
            assert_eq!(particle.position, Vec2::new(4.5, 6.5));
            assert_eq!(particle.life, 1.0);
            assert!(particle.velocity.x.abs() <= PARTICLE_MAX_SPEED);
            assert!(particle.velocity.y.abs() <= PARTICLE_MAX_SPEED);
            assert!((PARTICLE_MIN_SIZE..PARTICLE_MAX_SIZE).contains(&particle.size));
        }
    }

    #[test]
    fn update_moves_and_decays() {
        let mut set = ParticleSet {
            particles: vec![spark(1.0)],
        };
        set.update();
        let particle = set.iter().next().unwrap();
        assert!((particle.position - Vec2::new(0.1, -0.2)).length() < 1e-6);
        assert!((particle.life - 0.95).abs() < 1e-6);
    }

    #[test]
    fn burst_expires_after_twenty_frames() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut set = ParticleSet::default();
        set.spawn_burst(&mut rng, Position::new(0, 0));
        for _ in 0..19 {
            set.update();
        }
        assert_eq!(set.len(), PARTICLE_BURST_COUNT);
        // f32 accumulation may leave a sliver of life after the 20th step
        set.update();
        set.update();
        assert!(set.is_empty());
    }

    #[test]
    fn adjacent_expired_particles_are_all_removed() {
        let mut set = ParticleSet {
            particles: vec![spark(0.05), spark(0.04), spark(0.5), spark(0.01), spark(0.03)],
        };
        set.update();
        assert_eq!(set.len(), 1);
        assert!((set.iter().next().unwrap().life - 0.45).abs() < 1e-6);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut set = ParticleSet::default();
        set.spawn_burst(&mut rng, Position::new(1, 1));
        set.clear();
        assert!(set.is_empty());
    }
}
