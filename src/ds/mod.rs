pub mod arena_list;
pub mod bounded_list;

pub use arena_list::ArenaList;
pub use bounded_list::BoundedList;
