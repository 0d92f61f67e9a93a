pub mod balance_service;
pub mod chart_service;
pub mod scale_service;
pub mod series_service;
