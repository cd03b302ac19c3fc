pub mod app_orchestrator;
pub mod generation_flow;
