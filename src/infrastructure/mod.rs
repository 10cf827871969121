// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod html_page;
pub mod rally_repository;
pub mod svg;
