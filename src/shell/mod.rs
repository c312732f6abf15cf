// Composition root for the pay_runs service.
//
// Reads configuration, builds the in memory infrastructure, wires it into the command handler
// and projector, and exposes both over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
