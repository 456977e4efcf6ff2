/*!
 * HTTP surface of the gateway.
 *
 * - `models`: request/response schemas and boundary validation
 * - `handlers`: one handler per route
 */

pub mod handlers;
pub mod models;
