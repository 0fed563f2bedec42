


#[cfg(test)]
mod case_detail_load_tests;


#[cfg(test)]
mod case_detail_status_tests;



#[cfg(test)]
mod http_session_tests;
