// Application layer - Use cases over the work item repository
pub mod dashboard_service;
pub mod release_service;
pub mod work_item_repository;
