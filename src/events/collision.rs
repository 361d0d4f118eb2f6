//! Overlap events and the session's collision handlers.
//!
//! The collision system triggers an [`OverlapEvent`] for every intersecting
//! pair of an overlap rule. [`overlap_observer`] dispatches it to the handler
//! the rule names:
//!
//! - [`on_hero_vs_coin`] collects the coin.
//! - [`on_hero_vs_enemy`] either stomps the spider or restarts the session,
//!   depending on which way the hero was moving.
//!
//! Handlers get everything they may touch through [`SessionContext`].
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;
use log::{debug, info};

use crate::components::animation::Animation;
use crate::components::dead::{Dead, kill};
use crate::components::hero::Hero;
use crate::components::rigidbody::RigidBody;
use crate::components::spider::Spider;
use crate::components::sprite::Sprite;
use crate::events::audio::{AudioCmd, SFX_COIN, SFX_STOMP};
use crate::resources::collisionrules::OverlapHandler;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::worldsignals::{COIN_COUNT, WorldSignals};

/// Two entities of an overlap rule intersect. `a` belongs to the rule's first
/// group (always the hero for the level's rules), `b` to the second.
#[derive(Event, Debug, Clone, Copy)]
pub struct OverlapEvent {
    pub handler: OverlapHandler,
    pub a: Entity,
    pub b: Entity,
}

/// Session state handed to collision handlers.
#[derive(SystemParam)]
pub struct SessionContext<'w, 's> {
    pub commands: Commands<'w, 's>,
    pub signals: ResMut<'w, WorldSignals>,
    pub audio: MessageWriter<'w, AudioCmd>,
    pub next_state: ResMut<'w, NextGameState>,
}

impl SessionContext<'_, '_> {
    pub fn play_sfx(&mut self, id: &str) {
        self.audio.write(AudioCmd::play(id));
    }

    /// Throw the session away and build it again from the level document.
    pub fn restart(&mut self) {
        if self.next_state.is_pending() {
            return;
        }
        info!("Hero was hit, restarting the level");
        self.next_state.set(GameStates::Loading);
    }
}

pub fn overlap_observer(
    trigger: On<OverlapEvent>,
    mut bodies: Query<&mut RigidBody, Without<Dead>>,
    mut animations: Query<&mut Animation>,
    mut sprites: Query<&mut Sprite>,
    mut ctx: SessionContext,
) {
    let event = *trigger.event();
    match event.handler {
        OverlapHandler::CoinPickup => on_hero_vs_coin(event.b, &mut sprites, &mut ctx),
        OverlapHandler::Combat => {
            on_hero_vs_enemy(event.a, event.b, &mut bodies, &mut animations, &mut ctx)
        }
    }
}

/// Collect a coin: sound, kill it, count it.
pub fn on_hero_vs_coin(
    coin: Entity,
    sprites: &mut Query<&mut Sprite>,
    ctx: &mut SessionContext,
) {
    ctx.play_sfx(SFX_COIN);
    kill(&mut ctx.commands, sprites, coin);
    let count = ctx.signals.increment_integer(COIN_COUNT, 1);
    debug!("Coin {:?} collected, total {}", coin, count);
}

/// Falling onto a spider kills it and bounces the hero. Any other contact
/// restarts the session.
pub fn on_hero_vs_enemy(
    hero: Entity,
    enemy: Entity,
    bodies: &mut Query<&mut RigidBody, Without<Dead>>,
    animations: &mut Query<&mut Animation>,
    ctx: &mut SessionContext,
) {
    let Ok(hero_vy) = bodies.get(hero).map(|b| b.velocity.y) else {
        return;
    };
    // A dying spider no longer hurts or counts.
    if !bodies.get(enemy).map(|b| b.enabled).unwrap_or(false) {
        return;
    }

    if hero_vy > 0.0 {
        if let Ok(mut hero_body) = bodies.get_mut(hero) {
            Hero::bounce(&mut hero_body);
        }
        if let (Ok(mut enemy_body), Ok(mut animation)) =
            (bodies.get_mut(enemy), animations.get_mut(enemy))
        {
            let subscription = Spider::die(&mut enemy_body, &mut animation);
            ctx.commands.entity(enemy).insert(subscription);
        }
        ctx.play_sfx(SFX_STOMP);
        debug!("Spider {:?} stomped", enemy);
    } else {
        ctx.play_sfx(SFX_STOMP);
        ctx.restart();
    }
}
