pub(super) mod form;
pub(super) mod popups;
pub(super) mod task_table;
pub(super) mod util;
