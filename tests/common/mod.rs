#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use docket::models::queries;
use docket::util::db::{self, DbPool};
use docket::{controllers, Context};

/// A router over a private fixture store.
///
/// The store lives in `_dir`, so it has to outlive every request.
pub struct TestApp {
    _dir:   TempDir,
    pub pool:   DbPool,
    pub router: Router,
}

/// A decoded reply: status plus the body, `Value::Null` when empty.
pub struct Reply {
    pub status: StatusCode,
    pub body:   Value,
    pub raw:    Vec<u8>,
}

impl TestApp {
    /// Store w/ schema applied and nothing in it.
    pub fn empty() -> Self {
        let dir  = TempDir::new().expect("could not create temp dir");
        let path = dir.path().join("docket-test.sqlite3");
        let url  = path.to_str().expect("temp path is not utf-8").to_string();
        let pool = db::establish(&url, 2).expect("could not open test store");

        let router = controllers::router(Context::new(pool.clone()));
        TestApp { _dir: dir, pool: pool, router: router }
    }

    /// Store seeded with:
    ///
    /// 1. "buy groceries", tagged `food`
    /// 2. "wash dishes", tagged `chores` + `food`, one comment
    /// 3. "file taxes", completed, no tags
    pub fn seeded() -> Self {
        let app = TestApp::empty();

        app.with_conn(|conn| {
            create(conn, json!({ "text": "buy groceries", "tags": [{ "name": "food" }] }));
            let dishes = create(conn, json!({
                "text": "wash dishes",
                "tags": [{ "name": "chores" }, { "name": "food" }],
            }));
            create(conn, json!({ "text": "file taxes", "completedAt": 1617181920212i64 }));

            let comment = serde_json::from_value(json!({ "text": "use the good soap" })).unwrap();
            queries::create_comment(conn, dishes, comment).expect("could not seed comment");
        });

        app
    }

    pub fn with_conn<F, T>(&self, op: F) -> T where F: FnOnce(&mut SqliteConnection) -> T {
        let mut conn = self.pool.get().expect("could not check out connection");
        op(&mut *conn)
    }

    /// Runs raw SQL against the fixture store, e.g. to break it.
    pub fn execute(&self, sql: &str) {
        self.with_conn(|conn| diesel::sql_query(sql).execute(conn).expect("raw sql failed"));
    }

    pub fn count(&self, table: &str) -> i64 {
        #[derive(QueryableByName)]
        struct Count {
            #[diesel(sql_type = diesel::sql_types::BigInt)]
            n: i64,
        }

        self.with_conn(|conn| {
            diesel::sql_query(format!("SELECT COUNT(*) AS n FROM {}", table))
                .get_result::<Count>(conn)
                .expect("count failed")
                .n
        })
    }

    pub async fn get(&self, uri: &str) -> Reply {
        self.send(Method::GET, uri, None).await
    }

    pub async fn delete(&self, uri: &str) -> Reply {
        self.send(Method::DELETE, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: &str) -> Reply {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: &str) -> Reply {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<&str>) -> Reply {
        let mut req = Request::builder().method(method).uri(uri);

        let body = match body {
            Some(body) => {
                req = req.header("content-type", "application/json");
                Body::from(body.to_string())
            },

            None => Body::empty(),
        };

        let res = self.router.clone()
            .oneshot(req.body(body).unwrap())
            .await
            .unwrap();

        let status = res.status();
        let raw = res.into_body().collect().await.unwrap().to_bytes().to_vec();
        let body = match raw.is_empty() {
            true  => Value::Null,
            false => serde_json::from_slice(&raw).expect("reply is not json"),
        };

        Reply { status: status, body: body, raw: raw }
    }
}

fn create(conn: &mut SqliteConnection, payload: Value) -> i64 {
    let new_entry = serde_json::from_value(payload).expect("bad fixture");
    queries::create_entry(conn, new_entry).expect("could not seed entry").id()
}

pub fn names(tags: &Value) -> Vec<&str> {
    tags.as_array()
        .expect("tags is not an array")
        .iter()
        .map(|tag| tag["name"].as_str().expect("tag w/o name"))
        .collect()
}

pub fn ids(entries: &Value) -> Vec<i64> {
    entries.as_array()
        .expect("not an array")
        .iter()
        .map(|entry| entry["id"].as_i64().expect("record w/o id"))
        .collect()
}
