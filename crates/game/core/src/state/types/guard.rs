use super::common::{GuardId, Position};

/// Behaviour state of a guard.
///
/// Investigation data only exists while a guard investigates, so a patrolling
/// or chasing guard can never carry a stale target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GuardState {
    /// Walking the patrol route.
    #[default]
    Patrol,
    /// Heading to (or searching around) `target` for `countdown` more turns.
    Investigate { target: Position, countdown: u32 },
    /// Pursuing the player on sight.
    Chase,
    /// Terminal escalation; the guard is frozen until a new level starts.
    Alert,
}

impl GuardState {
    pub fn investigate_target(&self) -> Option<Position> {
        match self {
            Self::Investigate { target, .. } => Some(*target),
            _ => None,
        }
    }

    pub fn alert_countdown(&self) -> u32 {
        match self {
            Self::Investigate { countdown, .. } => *countdown,
            _ => 0,
        }
    }

    pub fn is_chasing(&self) -> bool {
        matches!(self, Self::Chase)
    }
}

/// Traversal direction along a patrol route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatrolDirection {
    #[default]
    Forward,
    Backward,
}

impl PatrolDirection {
    pub fn sign(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Ping-pong traversal over an immutable waypoint sequence.
///
/// `index` always addresses a valid waypoint of a non-empty path and the
/// direction flips only when the next index would leave the path.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatrolRoute {
    path: Vec<Position>,
    index: usize,
    direction: PatrolDirection,
}

impl PatrolRoute {
    pub fn new(path: Vec<Position>) -> Self {
        Self {
            path,
            index: 0,
            direction: PatrolDirection::Forward,
        }
    }

    pub fn path(&self) -> &[Position] {
        &self.path
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> PatrolDirection {
        self.direction
    }

    /// Waypoint the guard currently stands on or walks towards.
    pub fn waypoint(&self) -> Option<Position> {
        self.path.get(self.index).copied()
    }

    /// Moves the index one waypoint along the route, reversing at either end.
    pub fn advance(&mut self) {
        if self.path.len() < 2 {
            return;
        }

        let last = self.path.len() - 1;
        let next = self.index.checked_add_signed(self.direction.sign());
        match next {
            Some(next) if next <= last => self.index = next,
            _ => {
                self.direction = self.direction.reversed();
                // Reversing from either end always lands inside a path of length >= 2.
                self.index = if self.index == 0 { 1 } else { last - 1 };
            }
        }
    }

    /// Re-targets the waypoint closest to `from`; the lowest index wins ties.
    pub fn rejoin_nearest(&mut self, from: Position) {
        if let Some((index, _)) = self
            .path
            .iter()
            .enumerate()
            .min_by_key(|(index, point)| (point.manhattan(from), *index))
        {
            self.index = index;
        }
    }
}

/// A guard as tracked in the game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Guard {
    pub id: GuardId,
    pub position: Position,
    pub state: GuardState,
    pub patrol: PatrolRoute,
    pub vision_range: u32,
    /// Where this guard last had the player in sight.
    pub last_seen_player: Option<Position>,
}

impl Guard {
    pub fn new(id: GuardId, position: Position, patrol_path: Vec<Position>, vision_range: u32) -> Self {
        Self {
            id,
            position,
            state: GuardState::Patrol,
            patrol: PatrolRoute::new(patrol_path),
            vision_range,
            last_seen_player: None,
        }
    }

    pub fn with_state(mut self, state: GuardState) -> Self {
        self.state = state;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(len: i32) -> PatrolRoute {
        PatrolRoute::new((0..len).map(|x| Position::new(x, 0)).collect())
    }

    #[test]
    fn route_ping_pongs_between_endpoints() {
        let mut route = route(3);
        let mut visited = Vec::new();
        for _ in 0..6 {
            route.advance();
            visited.push((route.index(), route.direction()));
        }

        use PatrolDirection::{Backward, Forward};
        assert_eq!(
            visited,
            vec![
                (1, Forward),
                (2, Forward),
                (1, Backward),
                (0, Backward),
                (1, Forward),
                (2, Forward),
            ]
        );
    }

    #[test]
    fn index_stays_in_bounds_for_short_routes() {
        let mut empty = route(0);
        empty.advance();
        assert_eq!(empty.index(), 0);
        assert_eq!(empty.waypoint(), None);

        let mut single = route(1);
        for _ in 0..3 {
            single.advance();
            assert_eq!(single.index(), 0);
            assert_eq!(single.direction(), PatrolDirection::Forward);
        }

        let mut pair = route(2);
        for _ in 0..5 {
            pair.advance();
            assert!(pair.index() <= 1);
        }
    }

    #[test]
    fn rejoin_picks_closest_waypoint() {
        let mut route = route(4);
        route.rejoin_nearest(Position::new(3, 2));
        assert_eq!(route.index(), 3);

        route.rejoin_nearest(Position::new(-5, 0));
        assert_eq!(route.index(), 0);
    }

    #[test]
    fn only_investigation_carries_a_target() {
        let target = Position::new(2, 2);
        let investigating = GuardState::Investigate {
            target,
            countdown: 3,
        };

        assert_eq!(investigating.investigate_target(), Some(target));
        assert_eq!(investigating.alert_countdown(), 3);
        assert_eq!(GuardState::Chase.investigate_target(), None);
        assert_eq!(GuardState::Patrol.alert_countdown(), 0);
        assert_eq!(investigating.to_string(), "investigate");
    }
}
