//! Colors shared by the game and its menus.

pub mod palette;
