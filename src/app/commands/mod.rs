pub mod compile;
pub mod launch;
pub mod liftoff;
pub mod targets;
