#[cfg(debug_assertions)]
pub fn stats_endpoint() -> &'static str {
    "http://localhost:3001/webapp/mining_users"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn stats_endpoint() -> &'static str {
    "https://chronosbackend.onrender.com/webapp/mining_users"
}
