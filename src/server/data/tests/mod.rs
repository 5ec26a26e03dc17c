mod lapsed;
