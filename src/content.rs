//! Static instructional copy rendered on the dashboard.
//!
//! Everything here is fixed at build time; nothing is fetched or derived.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// A manual security check a reader can run against the deployed app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestScenario {
    pub title: &'static str,
    /// Ordered steps; the final entry states the expected outcome.
    pub steps: &'static [&'static str],
}

pub const TEST_SCENARIOS: &[TestScenario] = &[
    TestScenario {
        title: "Test 1: Access Without Token",
        steps: &[
            "1. Open browser dev tools (F12)",
            "2. Go to Application tab",
            "3. Clear Local Storage",
            "4. Refresh the page",
            "Expected: Redirected to login page",
        ],
    },
    TestScenario {
        title: "Test 2: Invalid Token",
        steps: &[
            "1. Copy current token",
            "2. Logout",
            "3. Login again",
            "4. Try using old token in API request",
            "Expected: 401 Unauthorized error",
        ],
    },
    TestScenario {
        title: "Test 3: Token Expiration",
        steps: &[
            "1. Login and get token",
            "2. Wait for token expiration (if configured)",
            "3. Try accessing protected route",
            "Expected: 401 Unauthorized error",
        ],
    },
    TestScenario {
        title: "Test 4: CORS Protection",
        steps: &[
            "1. Try accessing API from different origin",
            "2. Without proper CORS headers",
            "Expected: CORS error",
        ],
    },
];

/// "How It Works" walkthrough of the token flow.
pub const AUTH_FLOW_STEPS: &[&str] = &[
    "1. The login request is sent to Django REST Framework's authentication endpoint",
    "2. Django validates credentials using its built-in authentication system",
    "3. Upon success, a token is generated using rest_framework.authtoken",
    "4. The token is stored in the database and returned to the client",
    "5. Subsequent requests include this token in the Authorization header",
];
