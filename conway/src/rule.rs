// rule.rs - Conway's B3/S23 rule

/// Next state of a cell given its current state and live neighbor count.
#[inline]
pub const fn next_state(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3) => true,            // Birth
        _ => false,                    // Death or stays dead
    }
}
