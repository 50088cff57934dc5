//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_admin_directory;
mod in_memory_audit_log_repository;
mod in_memory_content_repository;
mod postgres_admin_directory;
mod postgres_audit_log_repository;
mod postgres_content_repository;

pub use in_memory_admin_directory::InMemoryAdminDirectory;
pub use in_memory_audit_log_repository::InMemoryAuditLogRepository;
pub use in_memory_content_repository::InMemoryContentRepository;
pub use postgres_admin_directory::PostgresAdminDirectory;
pub use postgres_audit_log_repository::PostgresAuditLogRepository;
pub use postgres_content_repository::PostgresContentRepository;
