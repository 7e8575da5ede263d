mod attributes;
mod blocks;
mod support;
