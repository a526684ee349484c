use crate::club::{MAX_SUBSTITUTES, PlayerPositionType, STARTING_SLOTS, TeamSelection};
use crate::{Club, Player};
use log::{debug, warn};

pub struct SquadSelector;

/// Slot layout of the default 4-4-2, slot index order.
const FORMATION: [PlayerPositionType; STARTING_SLOTS] = [
    PlayerPositionType::Goalkeeper,
    PlayerPositionType::Defender,
    PlayerPositionType::Defender,
    PlayerPositionType::Defender,
    PlayerPositionType::Defender,
    PlayerPositionType::Midfielder,
    PlayerPositionType::Midfielder,
    PlayerPositionType::Midfielder,
    PlayerPositionType::Midfielder,
    PlayerPositionType::Attacker,
    PlayerPositionType::Attacker,
];

impl SquadSelector {
    pub fn select(club: &Club) -> TeamSelection {
        // Filter available players (not injured)
        let available_players: Vec<&Player> =
            club.players.iter().filter(|p| p.is_available()).collect();

        if available_players.len() < STARTING_SLOTS {
            warn!(
                "{}: not enough available players for a full eleven: {}",
                club.name,
                available_players.len()
            );
        }

        let mut selection = TeamSelection::new();
        let mut used_players: Vec<u32> = Vec::with_capacity(STARTING_SLOTS + MAX_SUBSTITUTES);
        let mut open_slots = Vec::new();

        // Natural fits first
        for (slot, &position) in FORMATION.iter().enumerate() {
            match Self::find_best_player_for_position(&available_players, &used_players, position, true) {
                Some(player) => {
                    selection.set_starter(slot, Some(player.id));
                    used_players.push(player.id);
                }
                None => open_slots.push(slot),
            }
        }

        // Then anyone who can fill in, keeping the goal for keepers
        for slot in open_slots {
            let position = FORMATION[slot];
            if position == PlayerPositionType::Goalkeeper {
                continue;
            }

            if let Some(player) =
                Self::find_best_player_for_position(&available_players, &used_players, position, false)
            {
                debug!(
                    "{}: {} fills in at {}",
                    club.name,
                    player.name,
                    position.get_short_name()
                );
                selection.set_starter(slot, Some(player.id));
                used_players.push(player.id);
            }
        }

        for player in Self::select_substitutes(&available_players, &used_players) {
            selection.push_substitute(player.id);
        }

        debug!(
            "{}: selected {} starters, {} substitutes",
            club.name,
            selection.starter_count(),
            selection.substitutes().len()
        );

        selection
    }

    /// Backup goalkeeper first, then the strongest remaining players.
    fn select_substitutes<'p>(available_players: &[&'p Player], used_players: &[u32]) -> Vec<&'p Player> {
        let mut substitutes: Vec<&Player> = Vec::with_capacity(MAX_SUBSTITUTES);

        if let Some(backup_gk) = Self::find_best_player_for_position(
            available_players,
            used_players,
            PlayerPositionType::Goalkeeper,
            true,
        ) {
            substitutes.push(backup_gk);
        }

        let mut remaining: Vec<&Player> = available_players
            .iter()
            .filter(|p| !used_players.contains(&p.id))
            .filter(|p| !substitutes.iter().any(|s| s.id == p.id))
            .copied()
            .collect();

        remaining.sort_by(|a, b| b.skills.total().cmp(&a.skills.total()));

        substitutes.extend(remaining.into_iter().take(MAX_SUBSTITUTES - substitutes.len()));
        substitutes
    }

    fn find_best_player_for_position<'p>(
        available_players: &[&'p Player],
        used_players: &[u32],
        position: PlayerPositionType,
        natural_only: bool,
    ) -> Option<&'p Player> {
        available_players
            .iter()
            .filter(|p| !used_players.contains(&p.id))
            .filter(|p| !natural_only || p.position == position)
            // Outfield gaps are never filled by keepers
            .filter(|p| natural_only || p.position.is_outfield())
            .max_by_key(|p| p.skills.rating_for(position))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{InjuryType, PlayerInjury, PlayerSkills, PlayingStyle};

    fn create_test_player(id: u32, position: PlayerPositionType, level: u8) -> Player {
        Player::builder()
            .id(id)
            .name(format!("Player {}", id))
            .position(position)
            .skills(PlayerSkills::uniform(level))
            .build()
            .expect("Failed to build test player")
    }

    fn create_full_squad() -> Vec<Player> {
        let mut players = vec![
            create_test_player(1, PlayerPositionType::Goalkeeper, 12),
            create_test_player(2, PlayerPositionType::Goalkeeper, 8),
        ];

        let mut id = 3;
        for (position, count) in [
            (PlayerPositionType::Defender, 6),
            (PlayerPositionType::Midfielder, 6),
            (PlayerPositionType::Attacker, 4),
        ] {
            for n in 0..count {
                players.push(create_test_player(id, position, 10 + n as u8));
                id += 1;
            }
        }

        players
    }

    #[test]
    fn test_select_full_eleven_in_formation() {
        let club = Club::new(1, "Test".to_string(), 10, PlayingStyle::Balanced, create_full_squad());

        let selection = SquadSelector::select(&club);

        assert!(selection.is_full());
        assert_eq!(selection.starters()[0], Some(1));
        assert_eq!(selection.substitutes().len(), MAX_SUBSTITUTES);
        assert_eq!(selection.substitutes()[0], 2);

        for (slot, position) in FORMATION.iter().enumerate() {
            let player_id = selection.starters()[slot].unwrap();
            assert_eq!(club.player(player_id).unwrap().position, *position);
        }
    }

    #[test]
    fn test_select_prefers_stronger_players() {
        let club = Club::new(1, "Test".to_string(), 10, PlayingStyle::Balanced, create_full_squad());

        let selection = SquadSelector::select(&club);

        // Weakest two defenders (ids 3 and 4) start on the bench
        assert!(!selection.starters().contains(&Some(3)));
        assert!(!selection.starters().contains(&Some(4)));
    }

    #[test]
    fn test_injured_players_are_skipped() {
        let mut players = create_full_squad();
        players[0].injury = Some(PlayerInjury::new(InjuryType::AnkleSprain, 3));

        let club = Club::new(1, "Test".to_string(), 10, PlayingStyle::Balanced, players);
        let selection = SquadSelector::select(&club);

        assert!(!selection.contains(1));
        assert_eq!(selection.starters()[0], Some(2));
    }

    #[test]
    fn test_short_squad_fills_gaps_with_outfield_players() {
        let players = vec![
            create_test_player(1, PlayerPositionType::Midfielder, 10),
            create_test_player(2, PlayerPositionType::Midfielder, 11),
            create_test_player(3, PlayerPositionType::Attacker, 9),
        ];

        let club = Club::new(1, "Test".to_string(), 10, PlayingStyle::Balanced, players);
        let selection = SquadSelector::select(&club);

        assert_eq!(selection.starter_count(), 3);
        assert_eq!(selection.starters()[0], None);
        assert!(selection.substitutes().is_empty());
    }
}
