//! Integration tests driving the real actix app with mocked upstreams

mod process_audio;
mod server;
mod summarize;
