// Derived analytics: deterministic pure functions of the resume record.
// No model calls here — the LLM-backed analysis lives in assist.

pub mod handlers;
pub mod scoring;
