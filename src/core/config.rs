/// Grid size used when a board is created without an explicit size.
pub const DEFAULT_BOARD_SIZE: i32 = 10;

/// Ship lengths of the classic fleet: carrier, battleship, cruiser,
/// submarine, destroyer.
pub const STANDARD_FLEET: [usize; 5] = [5, 4, 3, 3, 2];

/// Total number of ship segments in [`STANDARD_FLEET`].
pub const STANDARD_FLEET_CELLS: usize = fleet_cells(&STANDARD_FLEET);

/// Random placement attempts per ship before giving up.
pub const PLACEMENT_ATTEMPTS: usize = 100;

const fn fleet_cells(lengths: &[usize]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < lengths.len() {
        total += lengths[i];
        i += 1;
    }
    total
}
