mod cli;
mod json;
mod logging;
