mod clients;
mod renewals;
mod stats;
