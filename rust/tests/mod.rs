mod calendars;
