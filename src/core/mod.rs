/// Quick actions and toasts
pub mod actions;

/// Per-session authentication state
pub mod auth;

/// Client store
pub mod client;

/// Communication store
pub mod communication;

/// AI design assistant conversation
pub mod design_chat;

/// Money, date and progress formatting
pub mod format;

/// AI tool catalogue and canned insights
pub mod insights;

/// Invoice store
pub mod invoice;

/// Role-based sidebar navigation
pub mod navigation;

/// Project store
pub mod project;

/// Route table and access guard
pub mod routes;

/// Case-insensitive text search
pub mod search;

/// Shared handle over all domain stores
pub mod stores;

/// Task store
pub mod task;

/// Team store
pub mod team;
