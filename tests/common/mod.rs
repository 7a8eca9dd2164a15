#![allow(dead_code)]

use alias_shortener::prelude::*;
use alias_shortener::routes::router;
use alias_shortener::utils::password::hash_password;
use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const TEST_SECRET: &str = "test-jwt-secret";
pub const TEST_USER_ID: i64 = 1;
pub const TEST_EMAIL: &str = "user@x.com";
pub const TEST_PASSWORD: &str = "password123";

/// URL store backed by a map; mirrors the unique-alias constraint.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    records: Mutex<HashMap<String, UrlRecord>>,
    next_id: Mutex<i64>,
}

impl InMemoryUrlRepository {
    pub fn with_records(records: &[(&str, &str)]) -> Self {
        let repo = Self::default();
        {
            let mut map = repo.records.lock().unwrap();
            let mut next_id = repo.next_id.lock().unwrap();
            for (alias, url) in records {
                *next_id += 1;
                map.insert(alias.to_string(), UrlRecord::new(*next_id, *alias, *url));
            }
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn url_of(&self, alias: &str) -> Option<String> {
        self.records
            .lock()
            .unwrap()
            .get(alias)
            .map(|r| r.url.clone())
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn save(&self, url: &str, alias: &str) -> Result<i64, AppError> {
        let mut map = self.records.lock().unwrap();
        if map.contains_key(alias) {
            return Err(AppError::conflict(
                "URL with this alias already exists",
                json!({ "alias": alias }),
            ));
        }

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        map.insert(alias.to_string(), UrlRecord::new(*next_id, alias, url));
        Ok(*next_id)
    }

    async fn get_url(&self, alias: &str) -> Result<String, AppError> {
        self.get_record(alias).await.map(|r| r.url)
    }

    async fn get_record(&self, alias: &str) -> Result<UrlRecord, AppError> {
        self.records
            .lock()
            .unwrap()
            .get(alias)
            .cloned()
            .ok_or_else(|| AppError::not_found("Alias not found", json!({ "alias": alias })))
    }

    async fn delete(&self, alias: &str) -> Result<(), AppError> {
        self.records
            .lock()
            .unwrap()
            .remove(alias)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("Alias not found", json!({ "alias": alias })))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// URL store whose every call fails like an unreachable database.
pub struct FailingUrlRepository;

#[async_trait]
impl UrlRepository for FailingUrlRepository {
    async fn save(&self, _url: &str, _alias: &str) -> Result<i64, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn get_url(&self, _alias: &str) -> Result<String, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn get_record(&self, _alias: &str) -> Result<UrlRecord, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn delete(&self, _alias: &str) -> Result<(), AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::internal("Database error", json!({})))
    }
}

/// User store seeded with one account.
pub struct InMemoryUserRepository {
    users: Mutex<Vec<UserCredential>>,
}

impl InMemoryUserRepository {
    pub fn seeded() -> Self {
        let user = UserCredential {
            id: TEST_USER_ID,
            email: TEST_EMAIL.to_string(),
            password_hash: hash_password(TEST_PASSWORD).unwrap(),
            created_at: Utc::now(),
        };

        Self {
            users: Mutex::new(vec![user]),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredential>, AppError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, email: &str, password_hash: &str) -> Result<UserCredential, AppError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == email) {
            return Err(AppError::conflict("Email already registered", json!({})));
        }

        let user = UserCredential {
            id: users.len() as i64 + 1,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<UserCredential>, AppError> {
        Ok(self.users.lock().unwrap().clone())
    }
}

pub fn token_service() -> Arc<TokenService> {
    Arc::new(TokenService::with_default_ttls(TEST_SECRET))
}

pub fn create_test_state(urls: Arc<dyn UrlRepository>) -> AppState {
    AppState::new(
        urls,
        Arc::new(InMemoryUserRepository::seeded()),
        token_service(),
    )
}

pub fn create_test_server(urls: Arc<dyn UrlRepository>) -> TestServer {
    TestServer::new(router(create_test_state(urls))).unwrap()
}

/// Access token for [`TEST_USER_ID`] signed with [`TEST_SECRET`].
pub fn access_token() -> String {
    token_service().issue_access(TEST_USER_ID).unwrap()
}
