mod auth;
mod guard;
mod helpers;
mod profile;
