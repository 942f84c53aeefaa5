#[cfg(test)]
mod common;

#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod session_restore_tests;

#[cfg(test)]
mod logout_tests;

#[cfg(test)]
mod navigation_tests;

#[cfg(test)]
mod composer_tests;

#[cfg(test)]
mod config_tests;
