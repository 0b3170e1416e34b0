//! Shared harness: server lifecycle, seeding and teardown.

#![allow(dead_code)]

use std::net::TcpListener;

use actix_web::dev::ServerHandle;

use api_server::config::AppConfig;
use api_server::state::AppState;
use blog_core::domain::BlogPost;
use blog_infra::fixtures;

/// A running server bound to an ephemeral port.
///
/// Uses the store named by `TEST_DATABASE_URL` when set, else the in-memory store.
pub struct TestServer {
    pub address: String,
    pub state: AppState,
    pub client: reqwest::Client,
    handle: ServerHandle,
}

impl TestServer {
    pub async fn start() -> Self {
        let config = AppConfig::for_tests();
        let state = AppState::new(config.database.as_ref())
            .await
            .expect("Failed to initialize test store");

        Self::start_with_state(state).await
    }

    pub async fn start_with_state(state: AppState) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
        let port = listener.local_addr().expect("No local address").port();

        let server = api_server::run(listener, state.clone()).expect("Failed to build server");
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            address: format!("http://127.0.0.1:{}", port),
            state,
            client: reqwest::Client::new(),
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn seed(&self, count: usize) -> Vec<BlogPost> {
        seed(&self.state, count).await
    }

    pub async fn tear_down(&self) {
        tear_down(&self.state).await;
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}

pub async fn seed(state: &AppState, count: usize) -> Vec<BlogPost> {
    fixtures::seed_posts(state.posts.as_ref(), count)
        .await
        .expect("Failed to seed posts")
}

pub async fn tear_down(state: &AppState) {
    fixtures::tear_down(state.posts.as_ref())
        .await
        .expect("Failed to tear down posts");
}
