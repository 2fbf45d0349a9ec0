mod gblo;
mod properties;
