//! Systems translating input into movement, proximity triggers, and the
//! scripted doorman approach.
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::events::AttemptStarted;
use crate::core::GameSession;
use crate::roster::CharacterId;
use crate::scene::layout::SceneLayout;

use super::components::{AutoApproach, KeyRepeat, PlayerState};
use super::events::{InteractCommand, MoveCommand};
use super::movement::{step, MoveDirection};

/// Delay before the scripted approach walks Sebbe to the doorman.
const AUTO_APPROACH_DELAY_SECS: f32 = 0.1;

const ARROW_KEYS: [(KeyCode, MoveDirection); 4] = [
    (KeyCode::ArrowLeft, MoveDirection::Left),
    (KeyCode::ArrowRight, MoveDirection::Right),
    (KeyCode::ArrowUp, MoveDirection::Up),
    (KeyCode::ArrowDown, MoveDirection::Down),
];

/// Turns arrow keys into movement commands, with held-key repeat.
pub fn keyboard_movement_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut repeat: ResMut<KeyRepeat>,
    mut moves: MessageWriter<MoveCommand>,
) {
    let mut any_held = false;
    for (key, direction) in ARROW_KEYS {
        if keyboard.just_pressed(key) {
            moves.write(MoveCommand { direction });
            repeat.timer.reset();
        }
        if keyboard.pressed(key) {
            any_held = true;
        }
    }

    if !any_held {
        repeat.timer.reset();
        return;
    }

    repeat.timer.tick(time.delta());
    if repeat.timer.just_finished() {
        for (key, direction) in ARROW_KEYS {
            if keyboard.pressed(key) && !keyboard.just_pressed(key) {
                moves.write(MoveCommand { direction });
            }
        }
    }
}

/// Applies queued movement steps, then runs the proximity poll.
///
/// Sebbe's first step instead arms the scripted doorman approach: the step is
/// applied normally, remaining queued steps are dropped, and no proximity
/// check runs for that step.
pub fn apply_move_commands(
    mut moves: MessageReader<MoveCommand>,
    layout: Res<SceneLayout>,
    mut player: ResMut<PlayerState>,
    mut session: ResMut<GameSession>,
    mut auto: ResMut<AutoApproach>,
    mut interactions: MessageWriter<InteractCommand>,
) {
    let mut moved = false;
    let mut scripted = false;

    for command in moves.read() {
        // Once the scripted approach is armed it owns the rest of this
        // frame's input.
        if scripted {
            continue;
        }
        player.position = step(
            player.position,
            command.direction,
            layout.step_size,
            &layout.bounds,
        );
        match command.direction {
            MoveDirection::Left => player.facing_left = true,
            MoveDirection::Right => player.facing_left = false,
            MoveDirection::Up | MoveDirection::Down => {}
        }
        moved = true;

        if session.selected_character() == Some(CharacterId::Sebbe)
            && session.spend_auto_approach()
        {
            auto.arm(AUTO_APPROACH_DELAY_SECS);
            info!("Scripted doorman approach armed");
            scripted = true;
        }
    }

    if !moved {
        return;
    }
    player.walking = true;

    if !scripted {
        if let Some(command) = proximity_hit(player.position, &layout, &session) {
            interactions.write(command);
        }
    }
}

/// Single-dispatch proximity poll: the doorman is checked first, then NPCs in
/// scene order; only the first match fires. Already-visited NPCs are skipped.
fn proximity_hit(
    position: Vec2,
    layout: &SceneLayout,
    session: &GameSession,
) -> Option<InteractCommand> {
    if within(position, layout.doorman, layout.doorman_threshold) {
        return Some(InteractCommand::Doorman);
    }
    for npc in &layout.npcs {
        if session.has_visited(npc.id) {
            continue;
        }
        if within(position, npc.position, layout.npc_threshold) {
            return Some(InteractCommand::Npc(npc.id));
        }
    }
    None
}

fn within(a: Vec2, b: Vec2, threshold: f32) -> bool {
    (a.x - b.x).abs() < threshold && (a.y - b.y).abs() < threshold
}

/// Fires the scripted approach once its delay elapses.
pub fn tick_auto_approach(
    time: Res<Time>,
    mut auto: ResMut<AutoApproach>,
    mut interactions: MessageWriter<InteractCommand>,
) {
    if auto.tick(time.delta()) {
        info!("Scripted doorman approach fires");
        interactions.write(InteractCommand::Doorman);
    }
}

/// Cancels a pending scripted approach when exploration ends.
pub fn cancel_auto_approach(mut auto: ResMut<AutoApproach>) {
    auto.cancel();
}

/// Puts the player back on the spawn point for a fresh attempt.
pub fn reset_player_on_attempt(
    mut attempts: MessageReader<AttemptStarted>,
    layout: Res<SceneLayout>,
    mut player: ResMut<PlayerState>,
) {
    for _ in attempts.read() {
        player.position = layout.spawn;
        player.facing_left = false;
        player.walking = false;
    }
}

/// Rests the walk animation once no arrow key is held.
pub fn settle_walk_state(keyboard: Res<ButtonInput<KeyCode>>, mut player: ResMut<PlayerState>) {
    if player.walking && !ARROW_KEYS.iter().any(|(key, _)| keyboard.pressed(*key)) {
        player.walking = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::components::NpcId;

    fn layout() -> SceneLayout {
        SceneLayout::fallback()
    }

    #[test]
    fn doorman_wins_over_nearby_npcs() {
        let layout = layout();
        let session = GameSession::default();
        // The fallback layout puts the blonde girl 50 units from the doorman;
        // standing between them is within both thresholds.
        let between = Vec2::new(525.0, 155.0);
        assert_eq!(
            proximity_hit(between, &layout, &session),
            Some(InteractCommand::Doorman)
        );
    }

    #[test]
    fn npcs_fire_within_their_threshold_only() {
        let layout = layout();
        let session = GameSession::default();

        let near_dj = Vec2::new(160.0, 180.0);
        assert_eq!(
            proximity_hit(near_dj, &layout, &session),
            Some(InteractCommand::Npc(NpcId::FailedDj))
        );

        let far_from_everything = Vec2::new(60.0, 390.0);
        assert_eq!(proximity_hit(far_from_everything, &layout, &session), None);
    }

    #[test]
    fn visited_npcs_stop_firing() {
        let layout = layout();
        let mut session = GameSession::default();
        let near_dj = Vec2::new(160.0, 180.0);

        session.record_npc_visit(NpcId::FailedDj);
        assert_eq!(proximity_hit(near_dj, &layout, &session), None);
    }

    #[test]
    fn threshold_is_axis_aligned() {
        let layout = layout();
        let session = GameSession::default();
        // Within 100 on x but not on y relative to the doorman.
        let offset = Vec2::new(layout.doorman.x + 90.0, layout.doorman.y + 150.0);
        assert_eq!(proximity_hit(offset, &layout, &session), None);
    }
}
