mod api;
mod frames;
