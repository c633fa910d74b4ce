pub(crate) const HELP_HINT: &str = "Type 'help' for the command list.";

pub(crate) const HELP_TEXT: &str = "\
Commands:
  user <name>          set the username
  pass <password>      set the password
  cv                   log in and continue to CV scraping
  apply                log in and continue to job applying
  submit               submit the login form with the current selection
  load <path>          load a resume file into the profile editor
  edit <json>          replace the profile editor buffer
  save                 validate the profile buffer and log the parsed data
  autoapply <key>|<title>|<location>|<phone>|<website>|<max>
                       assemble the auto-apply request from the buffer
  back                 return to the login screen
  wait <ms>            pause the command stream (useful in scripts)
  help                 show this text
  quit                 exit";
