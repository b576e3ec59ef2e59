mod audio;
mod handle;
mod keyword;
mod support;
