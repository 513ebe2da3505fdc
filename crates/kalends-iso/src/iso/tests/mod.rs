mod round_trip;
mod serialization;
