pub mod files;
pub mod store;

pub use files::{atomic_write, ensure_tick_dir, get_tick_dir, init_local_tick, read_file, tasks_file};
pub use store::{load_tasks, save_tasks, TaskRecord};
