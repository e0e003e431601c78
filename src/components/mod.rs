pub mod chart;
pub mod sidebar;
