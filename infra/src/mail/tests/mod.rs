mod http_mail_tests;
