//! Shared helpers for unit and integration tests.
//!
//! Compiled for this crate's own tests and, through the `test-support`
//! feature, for integration tests.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use actix_web::web;
use cap_std::{ambient_authority, fs::Dir};
use tempfile::TempDir;

use crate::domain::ports::{InMemoryUserDirectory, UserDirectory};
use crate::inbound::http::health::HealthState;
use crate::outbound::user_directory_from_json;
use crate::server::AppDependencies;

/// Three-user fixture matching the bundled `fixtures/mock_users.json`.
pub const SAMPLE_USERS_JSON: &str = r#"{
  "users": {
    "user@example.com": {
      "id": 1,
      "name": "Alice",
      "email": "user@example.com",
      "password": "mypassword123"
    },
    "bob.smith@example.org": {
      "id": 2,
      "name": "Bob Smith",
      "email": "bob.smith@example.org",
      "password": "correct horse battery staple"
    },
    "carol+ops@example.net": {
      "id": 3,
      "name": "Carol",
      "email": "carol+ops@example.net",
      "password": "s3cr3t!"
    }
  }
}"#;

/// A fixture file in a temporary directory, removed on drop.
pub struct TempFixture {
    _dir: TempDir,
    path: PathBuf,
}

impl TempFixture {
    /// Write `contents` to `mock_users.json` in a fresh temporary directory.
    ///
    /// # Errors
    /// Returns any I/O error raised while creating or writing the file.
    ///
    /// # Examples
    /// ```
    /// use login_backend::outbound::load_user_directory;
    /// use login_backend::test_support::{SAMPLE_USERS_JSON, TempFixture};
    ///
    /// let fixture = TempFixture::write(SAMPLE_USERS_JSON)?;
    /// let directory = load_user_directory(fixture.path()).expect("sample loads");
    /// assert_eq!(directory.len(), 3);
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn write(contents: &str) -> io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let root = Dir::open_ambient_dir(dir.path(), ambient_authority())?;
        root.write("mock_users.json", contents)?;
        let path = dir.path().join("mock_users.json");
        Ok(Self { _dir: dir, path })
    }

    /// Absolute path of the written file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Directory built from [`SAMPLE_USERS_JSON`].
///
/// # Panics
/// Panics if the sample fixture no longer parses.
pub fn sample_directory() -> Arc<dyn UserDirectory> {
    let directory: InMemoryUserDirectory = user_directory_from_json(SAMPLE_USERS_JSON)
        .unwrap_or_else(|err| panic!("sample fixture must parse: {err}"));
    Arc::new(directory)
}

/// Production app wiring over [`sample_directory`], already marked ready.
pub fn sample_app_dependencies() -> AppDependencies {
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    AppDependencies::from_directory(health, sample_directory())
}

pub mod openapi {
    //! OpenAPI schema inspection helpers.

    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::{Object, Schema};

    /// Borrow a registered component schema as an `Object`.
    ///
    /// # Panics
    /// Panics naming the schema when it is missing or not an object.
    pub fn component_object<'a>(doc: &'a utoipa::openapi::OpenApi, name: &str) -> &'a Object {
        let schema = doc
            .components
            .as_ref()
            .and_then(|components| components.schemas.get(name))
            .unwrap_or_else(|| panic!("schema '{name}' is not registered"));
        match schema {
            RefOr::T(Schema::Object(object)) => object,
            RefOr::Ref(reference) => panic!(
                "schema '{name}' is a $ref to '{}'",
                reference.ref_location
            ),
            _ => panic!("schema '{name}' is not an object"),
        }
    }
}

pub mod logs {
    //! In-memory capture of JSON log events for the current thread.

    use std::io;
    use std::sync::{Arc, Mutex, PoisonError};

    use serde_json::Value;
    use tracing::subscriber::DefaultGuard;
    use tracing_subscriber::fmt;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Events recorded while the returned guard is alive.
    pub struct CapturedLogs {
        buffer: SharedBuffer,
        _guard: DefaultGuard,
    }

    impl CapturedLogs {
        /// Route every event on this thread, down to `TRACE`, into memory.
        ///
        /// Single-threaded runtimes such as `#[actix_web::test]` keep request
        /// handling on the calling thread, so handler events are captured.
        pub fn start() -> Self {
            let buffer = SharedBuffer::default();
            let writer = buffer.clone();
            let subscriber = fmt()
                .json()
                .with_ansi(false)
                .with_max_level(tracing::Level::TRACE)
                .with_writer(move || writer.clone())
                .finish();
            let guard = tracing::subscriber::set_default(subscriber);
            Self {
                buffer,
                _guard: guard,
            }
        }

        /// Raw captured output.
        pub fn text(&self) -> String {
            let bytes = self
                .buffer
                .0
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            String::from_utf8_lossy(&bytes).into_owned()
        }

        /// Captured events, one JSON object per line.
        ///
        /// # Panics
        /// Panics if a captured line is not JSON.
        pub fn events(&self) -> Vec<Value> {
            self.text()
                .lines()
                .map(|line| {
                    serde_json::from_str(line)
                        .unwrap_or_else(|err| panic!("log line is not JSON ({err}): {line}"))
                })
                .collect()
        }

        /// Events whose message equals `message`.
        pub fn with_message(&self, message: &str) -> Vec<Value> {
            self.events()
                .into_iter()
                .filter(|event| event.pointer("/fields/message").and_then(Value::as_str) == Some(message))
                .collect()
        }
    }
}
