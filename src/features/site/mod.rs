//! Static site assets.
//!
//! Everything not claimed by an API route is looked up under the configured
//! static directory; `/` resolves to `index.html`.

pub mod routes;
