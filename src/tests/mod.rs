mod util;

mod collect;
mod erase;
