//! End-to-end tests against the real upstream APIs
