// Public routes (no auth): catalog reads/writes, signup, login.
// Protected routes (bearer auth): per-user bean ownership.
pub mod auth;
pub mod beans;
pub mod user_beans;
