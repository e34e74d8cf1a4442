// ABOUTME: Access gate deciding, per request, whether admin paths may proceed
// ABOUTME: Classifies the path, verifies the adminToken cookie, and redirects, rejects, or passes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

//! Admin Access Gate
//!
//! The gate runs in front of every route. Only admin paths read the session
//! cookie; everything else passes untouched.
//!
//! | Path class      | No cookie          | Bad cookie / non-admin     | Admin cookie       |
//! |-----------------|--------------------|----------------------------|--------------------|
//! | `ProtectedApi`  | 401                | 401 + clear                | proceed            |
//! | `ProtectedPage` | 303 `/adminauth`   | 303 `/adminauth` + clear   | proceed            |
//! | `LoginPage`     | render             | render + clear             | 303 `/admin`       |
//!
//! When the signing secret is not trusted, a presented cookie is never
//! verified: protected APIs answer 500, protected pages redirect to the login
//! page, and the login page renders.
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use inkwell_blog::admin::SessionTokenManager;
//! use inkwell_blog::middleware::admin_gate::{admin_gate, AdminGate};
//! use std::sync::Arc;
//!
//! # async fn handler() -> &'static str { "" }
//! # fn example() {
//! let tokens = Arc::new(SessionTokenManager::new(b"a-long-random-secret"));
//! let gate = Arc::new(AdminGate::new(tokens, true, false));
//! let app: Router = Router::new()
//!     .route("/admin", get(handler))
//!     .layer(middleware::from_fn_with_state(gate, admin_gate));
//! # }
//! ```

use crate::admin::{AdminSession, AuthError, SessionTokenManager};
use crate::constants::paths;
use crate::errors::AppError;
use crate::logging::AppLogger;
use crate::security::cookies::{clear_session_cookie, session_token};
use axum::extract::{Request, State};
use axum::http::header::SET_COOKIE;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, field, Span};

/// How the gate treats a request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// Credential endpoints; never gated
    OpenAuthApi,
    /// Admin JSON API
    ProtectedApi,
    /// The login page itself
    LoginPage,
    /// Admin HTML pages
    ProtectedPage,
    /// Everything else
    Public,
}

impl PathClass {
    /// Classify a request path
    #[must_use]
    pub fn classify(path: &str) -> Self {
        if path.starts_with(paths::OPEN_AUTH_API_PREFIX) {
            Self::OpenAuthApi
        } else if path.starts_with(paths::PROTECTED_API_PREFIX) {
            Self::ProtectedApi
        } else if path == paths::LOGIN_PAGE
            || path
                .strip_prefix(paths::LOGIN_PAGE)
                .is_some_and(|rest| rest == "/")
        {
            Self::LoginPage
        } else if path.starts_with(paths::PROTECTED_PAGE_PREFIX) {
            Self::ProtectedPage
        } else {
            Self::Public
        }
    }

    /// Whether the gate reads the session cookie for this class
    #[must_use]
    pub const fn reads_session(self) -> bool {
        matches!(
            self,
            Self::ProtectedApi | Self::ProtectedPage | Self::LoginPage
        )
    }
}

/// Authentication state of a request that the gate evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// No cookie, or one that failed verification
    Unauthenticated,
    /// A genuine token whose role lacks admin capability
    AuthenticatedNonAdmin,
    /// A genuine, current admin token
    AuthenticatedAdmin,
    /// The signing secret is not trusted, so the cookie was not verified
    ConfigError,
}

impl fmt::Display for GateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unauthenticated => "unauthenticated",
            Self::AuthenticatedNonAdmin => "authenticated_non_admin",
            Self::AuthenticatedAdmin => "authenticated_admin",
            Self::ConfigError => "config_error",
        };
        f.write_str(name)
    }
}

/// What happens to the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Hand the request to the route
    Proceed {
        /// Verified admin, attached to request extensions
        session: Option<AdminSession>,
        /// Append a clearing `Set-Cookie` to the route's response
        clear_cookie: bool,
    },
    /// 303 to the login page
    RedirectToLogin {
        /// Also clear the session cookie
        clear_cookie: bool,
    },
    /// 303 to the admin landing page
    RedirectToDashboard,
    /// 401 `{message:"Unauthorized"}`
    Unauthorized {
        /// Also clear the session cookie
        clear_cookie: bool,
    },
    /// 500 `{message:"Server configuration error"}`
    ConfigurationError,
}

/// Result of evaluating one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateOutcome {
    /// Path class the decision was made for
    pub class: PathClass,
    /// `None` when the path does not read the session
    pub state: Option<GateState>,
    /// Action to take
    pub decision: GateDecision,
}

impl GateOutcome {
    const fn pass_through(class: PathClass) -> Self {
        Self {
            class,
            state: None,
            decision: GateDecision::Proceed {
                session: None,
                clear_cookie: false,
            },
        }
    }
}

/// Session gate in front of admin pages and the admin API
pub struct AdminGate {
    tokens: Arc<SessionTokenManager>,
    trusts_secret: bool,
    secure_cookies: bool,
}

impl AdminGate {
    /// Create a gate
    ///
    /// `trusts_secret` is false when the signing secret is missing or a
    /// placeholder and the operator did not opt in to trusting it.
    #[must_use]
    pub const fn new(
        tokens: Arc<SessionTokenManager>,
        trusts_secret: bool,
        secure_cookies: bool,
    ) -> Self {
        Self {
            tokens,
            trusts_secret,
            secure_cookies,
        }
    }

    /// Evaluate a request at the current time
    #[must_use]
    pub fn evaluate(&self, path: &str, cookie: Option<&str>) -> GateOutcome {
        self.evaluate_at(path, cookie, Utc::now())
    }

    /// Evaluate a request as of `now`
    ///
    /// The outcome depends only on the arguments and the gate's read-only
    /// configuration.
    #[must_use]
    pub fn evaluate_at(&self, path: &str, cookie: Option<&str>, now: DateTime<Utc>) -> GateOutcome {
        let class = PathClass::classify(path);
        if !class.reads_session() {
            return GateOutcome::pass_through(class);
        }

        let Some(token) = cookie.filter(|token| !token.is_empty()) else {
            debug!(path, error = %AuthError::MissingToken, "No admin session presented");
            return GateOutcome {
                class,
                state: Some(GateState::Unauthenticated),
                decision: Self::reject(class, false),
            };
        };

        if !self.trusts_secret {
            let decision = match class {
                PathClass::ProtectedApi => GateDecision::ConfigurationError,
                PathClass::ProtectedPage => GateDecision::RedirectToLogin {
                    clear_cookie: false,
                },
                PathClass::LoginPage | PathClass::OpenAuthApi | PathClass::Public => {
                    GateDecision::Proceed {
                        session: None,
                        clear_cookie: false,
                    }
                }
            };
            AppLogger::log_security_event(
                "untrusted_signing_secret",
                "high",
                &format!("session cookie on {path} not verified"),
            );
            return GateOutcome {
                class,
                state: Some(GateState::ConfigError),
                decision,
            };
        }

        match self.tokens.authorize_admin_at(token, now) {
            Ok(session) => {
                let decision = if class == PathClass::LoginPage {
                    GateDecision::RedirectToDashboard
                } else {
                    GateDecision::Proceed {
                        session: Some(session),
                        clear_cookie: false,
                    }
                };
                GateOutcome {
                    class,
                    state: Some(GateState::AuthenticatedAdmin),
                    decision,
                }
            }
            Err(error @ AuthError::InsufficientRole { .. }) => {
                AppLogger::log_security_event(
                    "non_admin_session",
                    "medium",
                    &format!("{error} at {path}"),
                );
                GateOutcome {
                    class,
                    state: Some(GateState::AuthenticatedNonAdmin),
                    decision: Self::reject(class, true),
                }
            }
            Err(error) => {
                debug!(path, %error, "Admin session rejected");
                GateOutcome {
                    class,
                    state: Some(GateState::Unauthenticated),
                    decision: Self::reject(class, true),
                }
            }
        }
    }

    const fn reject(class: PathClass, clear_cookie: bool) -> GateDecision {
        match class {
            PathClass::ProtectedApi => GateDecision::Unauthorized { clear_cookie },
            PathClass::ProtectedPage => GateDecision::RedirectToLogin { clear_cookie },
            // Login page renders even when its cookie is bad
            PathClass::LoginPage | PathClass::OpenAuthApi | PathClass::Public => {
                GateDecision::Proceed {
                    session: None,
                    clear_cookie,
                }
            }
        }
    }

    fn clear_cookie(&self, mut response: Response) -> Response {
        if let Ok(value) = HeaderValue::from_str(&clear_session_cookie(self.secure_cookies)) {
            response.headers_mut().append(SET_COOKIE, value);
        }
        response
    }
}

/// Gate middleware for the whole router
pub async fn admin_gate(
    State(gate): State<Arc<AdminGate>>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = session_token(request.headers());
    let outcome = gate.evaluate(request.uri().path(), token.as_deref());

    if let Some(state) = outcome.state {
        Span::current().record("gate_state", field::display(state));
    }

    match outcome.decision {
        GateDecision::Proceed {
            session,
            clear_cookie,
        } => {
            if let Some(session) = session {
                request.extensions_mut().insert(session);
            }
            let response = next.run(request).await;
            if clear_cookie {
                gate.clear_cookie(response)
            } else {
                response
            }
        }
        GateDecision::RedirectToLogin { clear_cookie } => {
            let response = Redirect::to(paths::LOGIN_PAGE).into_response();
            if clear_cookie {
                gate.clear_cookie(response)
            } else {
                response
            }
        }
        GateDecision::RedirectToDashboard => Redirect::to(paths::ADMIN_LANDING).into_response(),
        GateDecision::Unauthorized { clear_cookie } => {
            let response = AppError::auth_required().into_response();
            if clear_cookie {
                gate.clear_cookie(response)
            } else {
                response
            }
        }
        GateDecision::ConfigurationError => {
            AppError::config("Signing secret is missing or a placeholder").into_response()
        }
    }
}
