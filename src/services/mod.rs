/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Score submission and leaderboard logic.
pub mod score_service;
/// Score formula.
pub mod scoring;
/// Word catalogue logic.
pub mod word_service;
