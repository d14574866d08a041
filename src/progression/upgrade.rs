//! Spending experience on stats.

use bevy::prelude::*;

use crate::combat::Cooldown;
use crate::core::GameClock;
use crate::data::{GameConfig, Stat, UpgradeTuning};
use crate::player::{Player, PlayerStats, Progress};

/// Cursor over the five stats, shared by the menu input and the menu UI.
#[derive(Resource, Debug, Clone, Default)]
pub struct UpgradeMenu {
    pub selection_index: usize,
    /// Debounce for cursor moves and purchases
    pub selection: Cooldown,
}

/// Buy one level of `stat` if the player can afford it.
///
/// The stat grows without regard to its displayed maximum.
pub fn purchase_upgrade(
    stats: &mut PlayerStats,
    progress: &mut Progress,
    stat: Stat,
    tuning: &UpgradeTuning,
) -> bool {
    let cost = stats.upgrade_cost.get(stat);
    if progress.exp < cost {
        return false;
    }
    progress.exp -= cost;
    *stats.stats.get_mut(stat) *= tuning.stat_multiplier;
    *stats.upgrade_cost.get_mut(stat) *= tuning.cost_multiplier;
    true
}

/// Left/right move the cursor, Space buys. Each action arms the debounce.
pub fn upgrade_menu_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    clock: Res<GameClock>,
    config: Res<GameConfig>,
    mut menu: ResMut<UpgradeMenu>,
    mut players: Query<(&mut PlayerStats, &mut Progress), With<Player>>,
) {
    let now = clock.now();
    menu.selection.tick(now);
    if menu.selection.is_running() {
        return;
    }

    let cooldown = config.upgrade.selection_cooldown_ms;
    let last = Stat::ALL.len() - 1;

    if keyboard.any_pressed([KeyCode::ArrowRight, KeyCode::KeyD]) && menu.selection_index < last {
        menu.selection_index += 1;
        menu.selection.start(now, cooldown);
    } else if keyboard.any_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]) && menu.selection_index > 0
    {
        menu.selection_index -= 1;
        menu.selection.start(now, cooldown);
    }

    if keyboard.pressed(KeyCode::Space) {
        menu.selection.start(now, cooldown);
        let Some(stat) = Stat::from_index(menu.selection_index) else {
            return;
        };
        for (mut stats, mut progress) in players.iter_mut() {
            if purchase_upgrade(&mut stats, &mut progress, stat, &config.upgrade) {
                info!(
                    "Upgraded {} to {:.1}",
                    stat.name(),
                    stats.stats.get(stat)
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::GameCatalog;

    fn player() -> (PlayerStats, Progress) {
        let catalog = GameCatalog::default();
        (
            PlayerStats::from_base(&catalog.player),
            Progress {
                exp: 150.0,
                gold: 0,
            },
        )
    }

    #[test]
    fn purchase_spends_exp_and_compounds() {
        let (mut stats, mut progress) = player();
        let tuning = UpgradeTuning::default();

        assert!(purchase_upgrade(&mut stats, &mut progress, Stat::Speed, &tuning));
        assert_eq!(progress.exp, 50.0);
        assert!((stats.stats.speed - 6.0).abs() < 1e-4);
        assert!((stats.upgrade_cost.speed - 140.0).abs() < 1e-4);

        assert!(!purchase_upgrade(&mut stats, &mut progress, Stat::Speed, &tuning));
        assert_eq!(progress.exp, 50.0);
    }

    #[test]
    fn purchase_ignores_displayed_maximum() {
        let (mut stats, mut progress) = player();
        progress.exp = 1_000_000.0;
        let tuning = UpgradeTuning::default();
        for _ in 0..10 {
            purchase_upgrade(&mut stats, &mut progress, Stat::Magic, &tuning);
        }
        assert!(stats.stats.magic > stats.max_stats.magic);
    }
}
