mod unordered;
