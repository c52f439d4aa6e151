//! Dungeon layout constants.

/// Room used when no map file is given.
///
/// `#` wall, `.` floor, `@` player start, `T` totem, `c` coin,
/// `f` fire element, `E` exit.
pub const DEFAULT_ROOM_MAP: &str = "\
#########
#@..c..E#
#.##.##.#
#..T.f..#
#.c...c.#
#########";
